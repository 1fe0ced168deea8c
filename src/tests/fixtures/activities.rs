// A smaller catalog than the seed, so tests do not depend on the bilingual entries.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};

pub fn chess_club() -> Activity {
    Activity {
        name: "Chess Club".to_string(),
        description: "Learn strategies and compete in chess tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 12,
        participants: vec![
            "michael@mergington.edu".to_string(),
            "daniel@mergington.edu".to_string(),
        ],
    }
}

pub fn test_catalog() -> ActivityCatalog {
    ActivityCatalog::new(vec![
        chess_club(),
        Activity {
            name: "Programming Class".to_string(),
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
        Activity {
            name: "Gym Class".to_string(),
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    ])
    .unwrap()
}
