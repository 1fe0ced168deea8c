use async_graphql::{ErrorExtensions, SimpleObject};

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::RosterError;

#[derive(SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<Activity> for GqlActivity {
    fn from(a: Activity) -> Self {
        Self {
            spots_left: a.spots_left(),
            name: a.name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        }
    }
}

impl ErrorExtensions for RosterError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.kind().code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
