use serde::Serialize;

/// Form sent to open a session.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    /// Administrator password of the router.
    pub password: &'a str,
}
