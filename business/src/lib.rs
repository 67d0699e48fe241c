pub mod application {
    pub mod widget {
        pub mod wishlist_widget;
    }
    pub mod wishlist {
        pub mod add;
        pub mod list;
        pub mod page;
        pub mod purge;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod widget {
        pub mod discovery;
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod add;
            pub mod list;
            pub mod page;
            pub mod purge;
            pub mod remove;
        }
    }
}
