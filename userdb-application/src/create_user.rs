use super::*;

pub fn create_user(
    connections: &memory::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let email = new_user.email.clone();
    Ok(connections.exclusive().transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            warn!("Failed to create user with email {}: {}", email, err);
            err
        })
    })?)
}
