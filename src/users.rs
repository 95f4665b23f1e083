//! Encapsulation and polymorphism without inheritance.
//!
//! `AdminUser` composes a `User` instead of extending it; both expose their
//! introduction through the `Introduce` trait.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid age {age}: age must be greater than zero")]
    InvalidAge { age: u32 },
}

pub trait Introduce {
    fn introduction(&self) -> String;
}

// =============================================================================
// Milestone 1: Private state behind accessors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Rejects zero and keeps the previous age.
    pub fn set_age(&mut self, age: u32) -> Result<(), UserError> {
        if age == 0 {
            tracing::warn!(user = %self.name, age, "rejected age update");
            return Err(UserError::InvalidAge { age });
        }
        self.age = age;
        Ok(())
    }
}

impl Introduce for User {
    fn introduction(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old.", self.name, self.age)
    }
}

// =============================================================================
// Milestone 2: Composition + trait override
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    user: User,
    privileges: Vec<String>,
}

impl AdminUser {
    pub fn new<I, S>(name: impl Into<String>, age: u32, privileges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user: User::new(name, age),
            privileges: privileges.into_iter().map(Into::into).collect(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn privileges(&self) -> &[String] {
        &self.privileges
    }
}

impl Introduce for AdminUser {
    fn introduction(&self) -> String {
        format!(
            "Hi, I'm Admin {} with privileges: {}.",
            self.user.name(),
            self.privileges.join(", ")
        )
    }
}

/// Dynamic dispatch over any mix of introducers.
pub fn introduce_all(people: &[&dyn Introduce]) -> Vec<String> {
    people.iter().map(|person| person.introduction()).collect()
}
