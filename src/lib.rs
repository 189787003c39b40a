pub mod config;
pub mod db;

pub mod shared {
    pub mod error;
    pub mod extract;
    pub mod views;
}

pub mod modules {
    pub mod pages {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod users {
        pub mod inbound {
            pub mod http;
        }
        pub mod model;
        pub mod queries;
    }
    pub mod comments {
        pub mod inbound {
            pub mod http;
        }
        pub mod model;
        pub mod queries;
    }
}

pub mod shell;
