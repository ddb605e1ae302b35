use std::collections::BTreeSet;

use proptest::prelude::*;

use folio::content::model::{Project, ProjectCategory, ProjectStatus};
use folio::stats::{label_weight, project_stats};

fn project(id: usize, technologies: Vec<String>) -> Project {
    Project {
        id: format!("p{id}"),
        name: format!("Project {id}"),
        description: String::new(),
        short_description: String::new(),
        technologies,
        features: vec![],
        challenges: vec![],
        solutions: vec![],
        images: vec![],
        demo_url: None,
        source_url: None,
        category: "misc".to_string(),
        status: ProjectStatus::Completed,
        start: "2023-01".to_string(),
        end: None,
        team_size: None,
        role: None,
        featured: false,
    }
}

fn categories_strategy() -> impl Strategy<Value = Vec<ProjectCategory>> {
    // Technology names drawn from a small pool so cross-project duplicates
    // actually happen.
    let tech = prop_oneof![
        Just("Rust".to_string()),
        Just("React".to_string()),
        Just("Postgres".to_string()),
        Just("Redis".to_string()),
        Just("Tailwind".to_string()),
    ];
    let technologies = proptest::collection::vec(tech, 0..6);
    let projects = proptest::collection::vec(technologies, 0..5);
    proptest::collection::vec(projects, 0..4).prop_map(|category_specs| {
        category_specs
            .into_iter()
            .enumerate()
            .map(|(ci, specs)| ProjectCategory {
                id: format!("c{ci}"),
                name: format!("Category {ci}"),
                description: None,
                projects: specs
                    .into_iter()
                    .enumerate()
                    .map(|(pi, techs)| project(ci * 100 + pi, techs))
                    .collect(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn distinct_technologies_equal_set_union(categories in categories_strategy()) {
        let stats = project_stats(&categories);
        let union: BTreeSet<&str> = categories
            .iter()
            .flat_map(|c| c.projects.iter())
            .flat_map(|p| p.technologies.iter())
            .map(String::as_str)
            .collect();
        prop_assert_eq!(stats.technologies, union.len());
    }

    #[test]
    fn totals_are_consistent(categories in categories_strategy()) {
        let stats = project_stats(&categories);
        let total: usize = categories.iter().map(|c| c.projects.len()).sum();
        prop_assert_eq!(stats.total_projects, total);
        prop_assert!(stats.completed_projects <= total);
        prop_assert!(stats.featured <= total);
    }

    #[test]
    fn any_label_weighs_a_known_weight(label in ".*") {
        let weight = label_weight(&label);
        prop_assert!([40, 60, 80, 100].contains(&weight));
    }

    #[test]
    fn unlisted_labels_weigh_forty(label in "[a-z]{1,12}") {
        // Lowercase labels never match the capitalized level names.
        prop_assert_eq!(label_weight(&label), 40);
    }
}
