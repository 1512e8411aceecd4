/// Labels of the vertical tab menu, in display order.
pub const TAB_LABELS: [&str; 4] = ["Home", "Profile", "Messages", "Settings"];

pub const HOME_TAB: usize = 0;
/// The second menu entry hosts the login form.
pub const LOGIN_TAB: usize = 1;
