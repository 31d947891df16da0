use crate::{middleware::auth::Principal, service::auth::token::TokenProvider};

mod article;

fn token_provider() -> TokenProvider {
    TokenProvider::new(b"service-test-secret", 900, 604_800)
}

fn principal_for(user: &entity::user::Model) -> Principal {
    Principal {
        user_id: user.id,
        username: user.username.clone(),
        role: user.role.clone(),
    }
}
