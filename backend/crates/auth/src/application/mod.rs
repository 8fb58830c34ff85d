pub mod config;
pub mod login;
pub mod sign_up;
pub mod token;

pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
