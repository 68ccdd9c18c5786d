/// Username and password pair sent with every Node Agent call.
///
/// Both are carried in plaintext, as the deployed service expects.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
