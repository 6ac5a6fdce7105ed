use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub email    : String,
    pub name     : String,
    pub username : String,
    pub role     : Role,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    #[default]
    Guest = 0,
    User  = 1,
    Admin = 2,
}

impl Role {
    pub const fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Self::Admin
        } else {
            Self::User
        }
    }
}

/// The caller on whose behalf an operation is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    User(Id),
    Admin(Id),
}

impl Identity {
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub const fn user_id(&self) -> Option<&Id> {
        match self {
            Self::Anonymous => None,
            Self::User(id) | Self::Admin(id) => Some(id),
        }
    }

    pub const fn role(&self) -> Role {
        match self {
            Self::Anonymous => Role::Guest,
            Self::User(_) => Role::User,
            Self::Admin(_) => Role::Admin,
        }
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        match user.role {
            Role::Guest => Self::Anonymous,
            Role::User => Self::User(user.id.clone()),
            Role::Admin => Self::Admin(user.id.clone()),
        }
    }
}
