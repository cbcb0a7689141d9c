pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod repository;
    pub mod response;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod selection;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
