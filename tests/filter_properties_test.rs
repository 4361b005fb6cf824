use course_connect::{compute_visible, default_departments, Course, Department};

fn scenario_catalog() -> Vec<Course> {
    vec![
        Course::new("CS101", "Intro to Programming", "Computer Science", "https://chat.whatsapp.com/cs101"),
        Course::new("BUS200", "Marketing Basics", "Business School", "https://chat.whatsapp.com/bus200"),
    ]
}

fn larger_catalog() -> Vec<Course> {
    vec![
        Course::new("CS101", "Intro to Programming", "Computer Science", "https://chat.whatsapp.com/1"),
        Course::new("BUS200", "Marketing Basics", "Business School", "https://chat.whatsapp.com/2"),
        Course::new("EE210", "Circuit Analysis", "School of Engineering", "https://chat.whatsapp.com/3"),
        Course::new("IT150", "Networking Fundamentals", "Information Technology (IT)", "https://chat.whatsapp.com/4"),
        Course::new("CS240", "Data Structures", "Computer Science", "https://chat.whatsapp.com/5"),
        Course::new("BUS310", "Business Statistics", "Business School", "https://chat.whatsapp.com/6"),
        Course::new("ME101", "Intro to Mechanics", "School of Engineering", "https://chat.whatsapp.com/7"),
        Course::new("LAW100", "Intro to Law", "Law School", "https://chat.whatsapp.com/8"),
        Course::new("it200", "Systems Administration", "information technology (it)", "https://chat.whatsapp.com/9"),
    ]
}

fn ids<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
    courses.iter().map(|c| c.id.as_str()).collect()
}

const QUERIES: &[&str] = &[
    "", "i", "in", "intro", "INTRO", "cs", "CS1", "bus", "data", "tion", "  ", "xyz", "101", "(it)",
];

fn department_ids(departments: &[Department]) -> Vec<String> {
    let mut ids: Vec<String> = departments.iter().map(|d| d.id.clone()).collect();
    ids.push("not-a-real-id".to_string());
    ids.push("ALL".to_string());
    ids
}

#[test]
fn scenario_a_search_by_name() {
    let catalog = scenario_catalog();
    let visible = compute_visible(&catalog, "intro", "all", &default_departments());
    assert_eq!(ids(&visible), vec!["CS101"]);
}

#[test]
fn scenario_b_department_only() {
    let catalog = scenario_catalog();
    let visible = compute_visible(&catalog, "", "business", &default_departments());
    assert_eq!(ids(&visible), vec!["BUS200"]);
}

#[test]
fn scenario_c_id_match_with_department() {
    let catalog = scenario_catalog();
    let visible = compute_visible(&catalog, "cs101", "cs", &default_departments());
    assert_eq!(ids(&visible), vec!["CS101"]);
}

#[test]
fn scenario_d_no_match() {
    let catalog = scenario_catalog();
    assert!(compute_visible(&catalog, "xyz", "all", &default_departments()).is_empty());
}

#[test]
fn scenario_e_empty_department() {
    let catalog = scenario_catalog();
    assert!(compute_visible(&catalog, "", "engineering", &default_departments()).is_empty());
}

#[test]
fn output_preserves_catalog_order() {
    let catalog = larger_catalog();
    let departments = default_departments();

    for department_id in department_ids(&departments) {
        for query in QUERIES {
            let visible = compute_visible(&catalog, query, &department_id, &departments);
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| catalog.iter().position(|c| std::ptr::eq(c, *v)).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "order broken for {:?}/{}",
                query,
                department_id
            );
        }
    }
}

#[test]
fn empty_query_and_all_is_identity() {
    let departments = default_departments();
    for catalog in [vec![], scenario_catalog(), larger_catalog()] {
        let visible: Vec<Course> = compute_visible(&catalog, "", "all", &departments)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(visible, catalog);
    }
}

#[test]
fn any_case_variant_of_a_substring_matches() {
    let catalog = larger_catalog();
    let departments = default_departments();

    for course in &catalog {
        for field in [&course.name, &course.id] {
            let chars: Vec<char> = field.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len().min(start + 4) {
                    let fragment: String = chars[start..end].iter().collect();
                    let mixed: String = fragment
                        .chars()
                        .enumerate()
                        .map(|(i, c)| {
                            if i % 2 == 0 {
                                c.to_ascii_uppercase()
                            } else {
                                c.to_ascii_lowercase()
                            }
                        })
                        .collect();

                    for query in [fragment.to_uppercase(), fragment.to_lowercase(), mixed] {
                        let visible = compute_visible(&catalog, &query, "all", &departments);
                        assert!(
                            visible.iter().any(|c| c.id == course.id),
                            "{} missing for query {:?}",
                            course.id,
                            query
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn department_results_match_configured_name_exactly() {
    let catalog = larger_catalog();
    let departments = default_departments();

    for department in departments.iter().filter(|d| !d.is_wildcard()) {
        for query in QUERIES {
            for course in compute_visible(&catalog, query, &department.id, &departments) {
                assert_eq!(course.department, department.name);
            }
        }
    }

    // lowercase department text on "it200" never matches the IT department
    let it = compute_visible(&catalog, "", "it", &departments);
    assert_eq!(ids(&it), vec!["IT150"]);
}

#[test]
fn unknown_department_id_yields_nothing() {
    let catalog = larger_catalog();
    let departments = default_departments();
    for department_id in ["not-a-real-id", "ALL", "Computer Science", ""] {
        for query in QUERIES {
            assert!(compute_visible(&catalog, query, department_id, &departments).is_empty());
        }
    }
}

#[test]
fn longer_queries_never_widen_results() {
    let catalog = larger_catalog();
    let departments = default_departments();
    let typed = ["", "i", "in", "int", "intr", "intro", "intro ", "intro t", "intro to", "intro to m"];

    for department_id in department_ids(&departments) {
        let sizes: Vec<usize> = typed
            .iter()
            .map(|q| compute_visible(&catalog, q, &department_id, &departments).len())
            .collect();
        assert!(
            sizes.windows(2).all(|w| w[1] <= w[0]),
            "{}: {:?}",
            department_id,
            sizes
        );
    }
}

#[test]
fn custom_departments_drive_the_lookup() {
    let catalog = larger_catalog();
    let departments = vec![Department::new("all", "Everything"), Department::new("law", "Law School")];

    assert_eq!(ids(&compute_visible(&catalog, "", "law", &departments)), vec!["LAW100"]);
    assert!(compute_visible(&catalog, "", "cs", &departments).is_empty());
}

#[test]
fn wildcard_works_without_a_configured_all_entry() {
    let catalog = scenario_catalog();
    let departments = vec![Department::new("cs", "Computer Science")];
    assert_eq!(compute_visible(&catalog, "", "all", &departments).len(), 2);
}
