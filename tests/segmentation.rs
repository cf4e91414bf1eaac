use vertical_text_renderer::{Column, NO_BREAK_AFTER, segment_into_columns};

const SAMPLES: [&str; 9] = [
    "こんにちは\n世界",
    "これは長いテキストです",
    "これは。テスト、です",
    "春はあけぼの。やうやう白くなりゆく山ぎは、すこしあかりて、紫だちたる雲のほそくたなびきたる。",
    "「こんにちは」と彼は言った。\n『世界』は広い、とても広い。」」",
    "。、」』\n。。。あ",
    "ab cd\r\nef\n\n\ngh ij kl",
    "あいうえおか\rき\r\nくけこ\r",
    "",
];

fn strings(columns: &[Column]) -> Vec<String> {
    columns.iter().map(Column::as_string).collect()
}

fn normalized(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[test]
fn concrete_scenarios() {
    assert_eq!(strings(&segment_into_columns("こんにちは\n世界", 10).unwrap()), ["こんにちは", "世界"]);
    assert_eq!(
        strings(&segment_into_columns("これは長いテキストです", 5).unwrap()),
        ["これは長い", "テキストです"]
    );
    assert_eq!(strings(&segment_into_columns("これは。テスト、です", 3).unwrap())[0], "これは。");
    assert_eq!(
        strings(&segment_into_columns("あいうえおか\rき", 5).unwrap()),
        ["あいうえお", "か\rき"]
    );
    for max in 1..5 {
        assert!(segment_into_columns("", max).unwrap().is_empty());
    }
}

#[test]
fn every_character_survives_in_order() {
    for text in SAMPLES {
        for max in 1..=12 {
            let columns = segment_into_columns(text, max).unwrap();
            let joined: String = strings(&columns).concat();
            let expected: String = normalized(text).chars().filter(|c| *c != '\n').collect();
            assert_eq!(joined, expected, "{text:?} max={max}");
            assert!(columns.iter().all(|column| !column.is_empty()));
        }
    }
}

#[test]
fn paragraphs_segment_independently() {
    for text in SAMPLES {
        for max in 1..=12 {
            let whole = segment_into_columns(text, max).unwrap();
            let by_paragraph: Vec<Column> = normalized(text)
                .split('\n')
                .flat_map(|paragraph| segment_into_columns(paragraph, max).unwrap())
                .collect();
            assert_eq!(whole, by_paragraph, "{text:?} max={max}");
        }
    }
}

#[test]
fn closing_punctuation_never_starts_a_wrapped_column() {
    for text in SAMPLES {
        for paragraph in normalized(text).split('\n') {
            for max in 1..=12 {
                let columns = segment_into_columns(paragraph, max).unwrap();
                for column in columns.iter().skip(1) {
                    let first = column.chars()[0];
                    assert!(
                        !NO_BREAK_AFTER.contains(&first),
                        "{paragraph:?} max={max}: column {column} starts with {first}"
                    );
                }
            }
        }
    }
}

#[test]
fn columns_overflow_only_by_punctuation_and_one_widow() {
    for text in SAMPLES {
        for max in 1..=12 {
            for column in segment_into_columns(text, max).unwrap() {
                let regular = column.chars().iter().filter(|c| !NO_BREAK_AFTER.contains(*c)).count();
                assert!(regular <= max + 1, "{text:?} max={max}: {column}");
            }
        }
    }
}
