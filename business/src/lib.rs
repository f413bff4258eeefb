pub mod application {
    pub mod food_log {
        pub mod clear;
        pub mod delete;
        pub mod get_summary;
        pub mod load;
        pub mod query;
        pub mod search;
        pub mod store;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod food_log {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod summary;
        pub mod use_cases {
            pub mod clear;
            pub mod delete;
            pub mod get_summary;
            pub mod load_log;
            pub mod load_query;
            pub mod load_suggestions;
            pub mod search;
            pub mod set_query;
        }
    }
}
