pub mod incoming {
    pub mod web {
        pub mod access_gate;
        pub mod routes;

        pub use access_gate::{AccessGate, PublicPaths};
    }
}
pub mod outgoing;
