use super::*;

fn uniform(axis: Axis, response: u8) -> Vec<Answer> {
    (0..QUESTIONS_PER_AXIS)
        .map(|_| Answer::new(axis, response))
        .collect()
}

fn full_set(responses: [u8; 4]) -> Vec<Answer> {
    let mut out = Vec::new();
    for (axis, response) in Axis::ALL.into_iter().zip(responses) {
        out.extend(uniform(axis, response));
    }
    out
}

#[test]
fn test_tally_sums_per_axis() {
    let raw = tally(&full_set([1, 5, 3, 2])).unwrap();
    assert_eq!(raw, RawScores::new(7, 35, 21, 14));
}

#[test]
fn test_tally_is_order_independent() {
    let mut answers = full_set([4, 2, 5, 1]);
    let forward = tally(&answers).unwrap();
    answers.reverse();
    assert_eq!(tally(&answers).unwrap(), forward);
}

#[test]
fn test_reverse_keyed_answers_invert_weight() {
    let mut answers = full_set([3, 3, 3, 3]);
    answers[0] = Answer::reversed(Axis::Structure, 5);
    answers[1] = Answer::reversed(Axis::Structure, 2);
    let raw = tally(&answers).unwrap();
    // 5 * 3 + (6 - 5) + (6 - 2)
    assert_eq!(raw.structure, 20);
    assert_eq!(raw.motivation, 21);
}

#[test]
fn test_tally_output_stays_in_raw_range() {
    for response in RESPONSE_MIN..=RESPONSE_MAX {
        let mut answers = full_set([response; 4]);
        answers[3] = Answer::reversed(Axis::Structure, response);
        assert!(tally(&answers).unwrap().is_in_range());
    }
}

#[test]
fn test_rejects_response_out_of_scale() {
    let mut answers = full_set([3, 3, 3, 3]);
    answers[9] = Answer::new(Axis::Motivation, 6);
    assert_eq!(
        tally(&answers),
        Err(TallyError::ResponseOutOfRange {
            index: 9,
            response: 6
        })
    );

    answers[9] = Answer::new(Axis::Motivation, 0);
    assert!(matches!(
        tally(&answers),
        Err(TallyError::ResponseOutOfRange { response: 0, .. })
    ));
}

#[test]
fn test_rejects_wrong_question_count() {
    let mut answers = full_set([3, 3, 3, 3]);
    answers.retain(|a| a.axis != Axis::Cognitive);
    answers.extend(uniform(Axis::Cognitive, 3).into_iter().take(6));
    assert_eq!(
        tally(&answers),
        Err(TallyError::QuestionCount {
            axis: Axis::Cognitive,
            expected: 7,
            found: 6
        })
    );
}

#[test]
fn test_answer_deserializes_with_default_reverse() {
    let answer: Answer = serde_json::from_str(r#"{"axis":"task","response":4}"#).unwrap();
    assert_eq!(answer, Answer::new(Axis::Task, 4));
}
