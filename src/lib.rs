pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod training {
        pub mod core {
            pub mod entities;
            pub mod errors;
            pub mod ports;
            pub mod rules;
            pub mod window;
        }
        pub mod application {
            pub mod capacity_guard;
            pub mod course_validation;
            pub mod entity_existence_validator;
            pub mod errors;
            pub mod period_validation;
            pub mod schedule_conflict_checker;
        }
        pub mod use_cases {
            pub mod register_worker {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_period {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_period {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_period {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_course {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_course {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_course {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod enroll_worker {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_enrollment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod withdraw_enrollment {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod browse_courses {
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod in_memory_store;
            }
        }
    }
}

pub mod shell;
