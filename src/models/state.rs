/// Open/closed flag of a single modal instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

/// Values typed into the login form. Never validated or sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub user_id: String,
    pub password: String,
}

impl LoginForm {
    /// `(label, value)` pairs echoed back after submit, unmasked.
    pub fn echo_pairs(&self) -> [(&str, &str); 2] {
        [("User ID", self.user_id.as_str()), ("Password", self.password.as_str())]
    }

    pub fn clear(&mut self) {
        self.user_id.clear();
        self.password.clear();
    }
}
