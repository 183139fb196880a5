pub mod application {
    pub mod cart {
        pub mod price;
    }
    pub mod checkout {
        pub mod place_order;
        pub mod session;
    }
    pub mod location {
        pub mod prefill_address;
    }
    pub mod menu {
        pub mod list;
        pub mod list_categories;
    }
    pub mod order {
        pub mod get_all;
        pub mod submit;
        pub mod update_status;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod price;
        }
    }
    pub mod checkout {
        pub mod card;
        pub mod details;
        pub mod errors;
        pub mod flow;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod location {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod prefill_address;
        }
    }
    pub mod menu {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod list;
            pub mod list_categories;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod submit;
            pub mod update_status;
        }
    }
    pub mod payment {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
}
