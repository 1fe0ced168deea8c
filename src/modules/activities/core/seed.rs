// The activities offered at Mergington High School.
//
// The set is fixed for the lifetime of the process; only rosters change.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog, CatalogError};

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn seed_catalog() -> Result<ActivityCatalog, CatalogError> {
    ActivityCatalog::new(vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Club de Ajedrez",
            "Aprende estrategias y compite en torneos de ajedrez",
            "Viernes, 3:30 PM - 5:00 PM",
            12,
            &["carlos@mergington.edu", "lucia@mergington.edu"],
        ),
        activity(
            "Clase de Programación",
            "Aprende fundamentos de programación y desarrolla proyectos",
            "Martes y Jueves, 3:30 PM - 4:30 PM",
            20,
            &["ana@mergington.edu", "isabel@mergington.edu"],
        ),
        activity(
            "Educación Física",
            "Actividades deportivas y educación física",
            "Lunes, Miércoles y Viernes, 2:00 PM - 3:00 PM",
            30,
            &["diego@mergington.edu", "paula@mergington.edu"],
        ),
        activity(
            "Club de Robótica",
            "Diseña y construye robots innovadores",
            "Miércoles, 4:00 PM - 5:30 PM",
            15,
            &["jorge@mergington.edu"],
        ),
        activity(
            "Taller de Artes",
            "Expresión artística a través de pintura y escultura",
            "Jueves, 3:30 PM - 5:00 PM",
            18,
            &["maria@mergington.edu", "alejandra@mergington.edu"],
        ),
        activity(
            "Club de Debate",
            "Desarrolla habilidades de oratoria y argumentación",
            "Martes, 4:00 PM - 5:30 PM",
            20,
            &["pedro@mergington.edu"],
        ),
    ])
}

#[cfg(test)]
mod seed_catalog_tests {
    use super::*;
    use crate::modules::activities::core::email::normalize_email;
    use rstest::rstest;

    #[rstest]
    fn it_should_seed_nine_activities_in_catalog_order() {
        let catalog = seed_catalog().unwrap();
        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Club de Ajedrez",
                "Clase de Programación",
                "Educación Física",
                "Club de Robótica",
                "Taller de Artes",
                "Club de Debate",
            ]
        );
    }

    #[rstest]
    fn it_should_seed_each_activity_under_a_unique_name() {
        let catalog = seed_catalog().expect("seed names must be unique");
        assert_eq!(catalog.len(), 9);
    }

    #[rstest]
    fn it_should_seed_chess_club_intact() {
        let catalog = seed_catalog().unwrap();
        let chess = catalog.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[rstest]
    fn it_should_only_seed_normalized_unique_emails() {
        for activity in seed_catalog().unwrap().iter() {
            for (i, email) in activity.participants.iter().enumerate() {
                assert_eq!(&normalize_email(email), email);
                assert!(!activity.participants[i + 1..].contains(email));
            }
        }
    }
}
