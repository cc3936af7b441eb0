use super::*;

pub fn update_user(
    connections: &memory::Connections,
    user_id: &str,
    update: usecases::UpdateUser,
) -> Result<User> {
    Ok(connections.exclusive().transaction(|conn| {
        usecases::update_user(conn, user_id, update).map_err(|err| {
            warn!("Failed to update user {}: {}", user_id, err);
            err
        })
    })?)
}
