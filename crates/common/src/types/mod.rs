use serde::Serialize;

/// Body returned by the liveness endpoint.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
