use crate::domain::{Order, User};

#[generate_configuration]
pub struct UserConfiguration;

impl UserConfiguration {
    pub fn configure(&self, builder: &mut EntityTypeBuilder<User>) {}
}

#[generate_configuration]
pub struct OrderConfiguration;

impl IEntityTypeConfiguration<Order> for OrderConfiguration {
    fn configure(&self, builder: &mut EntityTypeBuilder<Order>) {}
}

/// Not wired to an entity yet.
#[generate_configuration]
pub struct DraftConfiguration;
