use kira_pathscore::schema::v1::PathscoreV1;

#[test]
fn schema_roundtrip_v1() {
    let report = PathscoreV1::empty("0.0.0-test");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: PathscoreV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "kira-pathscore");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.input_meta.sample.layout, "csv");
    assert!(decoded.scores.is_none());
}
