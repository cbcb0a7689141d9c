//! Row selection and button enablement for the catalog page.
//!
//! The browser script keeps the same state; this module is its typed model.
//! Everything here is pure: `render` derives what the page shows from the
//! selected ids and the rows currently displayed.

use uuid::Uuid;

use super::model::Product;
use super::value_objects::UnitPrice;

/// Checked row ids, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<Uuid>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a checkbox change. Checking an id twice keeps a single entry.
    pub fn toggle(&mut self, id: Uuid, checked: bool) {
        if checked {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|selected| *selected != id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &[Uuid] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The row Edit acts on: only defined for a single selection.
    pub fn edit_target(&self) -> Option<Uuid> {
        match self.selected.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// The row Delete acts on: the first checked id, even when several are checked.
    pub fn delete_target(&self) -> Option<Uuid> {
        self.selected.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub add_enabled: bool,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
}

impl ButtonStates {
    pub fn for_count(selected: usize) -> Self {
        Self {
            add_enabled: selected == 0,
            edit_enabled: selected == 1,
            delete_enabled: selected > 0,
        }
    }
}

/// Contents of the add/edit form as displayed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub unit_price: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.to_string(),
            unit_price: product.unit_price.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub buttons: ButtonStates,
    pub form: ProductForm,
}

/// Derives button enablement and form contents from the selection.
///
/// With exactly one row selected the form mirrors that row; otherwise it is
/// cleared. A selected id missing from `rows` also yields a cleared form.
pub fn render(state: &SelectionState, rows: &[Product]) -> SelectionView {
    let form = state
        .edit_target()
        .and_then(|id| rows.iter().find(|row| row.id == id))
        .map(ProductForm::from_product)
        .unwrap_or_default();

    SelectionView {
        buttons: ButtonStates::for_count(state.len()),
        form,
    }
}

/// Client-side form check run before any request is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub title_invalid: bool,
    pub unit_price_invalid: bool,
}

impl FormValidation {
    pub fn check(form: &ProductForm) -> Self {
        let price_ok = form
            .unit_price
            .trim()
            .parse::<f64>()
            .is_ok_and(|price| UnitPrice::new(price).is_ok());

        Self {
            title_invalid: form.title.trim().is_empty(),
            unit_price_invalid: !price_ok,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title_invalid && !self.unit_price_invalid
    }
}
