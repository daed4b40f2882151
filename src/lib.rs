pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod maintenance_records {
        pub mod core {
            pub mod commands;
            pub mod decision;
            pub mod evolve;
            pub mod format;
            pub mod record;
            pub mod shift;
            pub mod state;
            pub mod timeline;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod start_call {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_call {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_record {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod view_timeline {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
    }
}

pub mod shell;
