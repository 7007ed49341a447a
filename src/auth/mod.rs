pub mod flow;
pub mod model;
pub mod validation;

pub use flow::{AuthFlow, AuthStep};
pub use model::{Hostel, SignupDetails, UserProfile};
