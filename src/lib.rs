pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod email;
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod withdraw_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod roster_store;
                pub mod roster_store_in_memory;
            }
        }
    }
}

pub mod shell;
