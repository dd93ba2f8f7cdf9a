use super::*;

#[test]
fn can_read_json_problem() {
    let json = r#"{ "ranks": [5, 1, 8], "cars": 6 }"#;

    let problem = BufReader::new(json.as_bytes()).read_json_problem().unwrap();

    assert_eq!(problem.ranks(), &[5, 1, 8]);
    assert_eq!(problem.cars(), 6);
}

#[test]
fn can_reject_invalid_json_problem() {
    let json = r#"{ "ranks": [], "cars": 6 }"#;

    let result = BufReader::new(json.as_bytes()).read_json_problem();

    assert_eq!(result.err(), Some("invalid problem: ranks should not be empty".to_string()));
}

#[test]
fn can_reject_malformed_json() {
    let json = r#"{ "ranks": [1, 2] }"#;

    let result = deserialize_problem(BufReader::new(json.as_bytes()));

    assert!(result.unwrap_err().starts_with("cannot deserialize problem"));
}

#[test]
fn can_serialize_and_deserialize_problem_definition() {
    let definition = ProblemDefinition { ranks: vec![3, 3, 1], cars: 7 };
    let mut buffer = Vec::new();

    serialize_problem(BufWriter::new(&mut buffer), &definition).unwrap();

    assert_eq!(deserialize_problem(BufReader::new(buffer.as_slice())).unwrap(), definition);
}

#[cfg(feature = "csv-format")]
#[test]
fn can_read_csv_problem() {
    let csv = "rank\n5\n1\n8\n";

    let problem = read_csv_problem(BufReader::new(csv.as_bytes()), 6).unwrap();

    assert_eq!(problem.ranks(), &[5, 1, 8]);
    assert_eq!(problem.cars(), 6);
}

#[cfg(feature = "csv-format")]
#[test]
fn can_reject_csv_problem_with_invalid_rank() {
    let csv = "rank\n5\nfast\n";

    let result = read_csv_problem(BufReader::new(csv.as_bytes()), 6);

    assert!(result.unwrap_err().starts_with("cannot read worker"));
}
