use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, Role},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};


/// Lowest cost bcrypt accepts, keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;

fn register_params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        name: "Amira".to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        phone: "0612345678".to_string(),
    }
}
