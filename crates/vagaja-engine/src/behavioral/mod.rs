//! Behavioral assessments: catalogs, answer sheets, and the three scorers.

pub mod answers;
pub mod big_five;
pub mod catalog;
pub mod disc;
pub mod sjt;

use serde::{Deserialize, Serialize};

use answers::AnswerSet;
use catalog::TestLibrary;

/// A scored assessment, tagged like its answer sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "test", content = "report")]
pub enum TestReport {
    #[serde(rename = "big-five")]
    BigFive(big_five::BigFiveReport),
    #[serde(rename = "disc")]
    Disc(disc::DiscReport),
    #[serde(rename = "sjt")]
    Sjt(sjt::SjtReport),
}

/// Scores any answer sheet against the matching document in the library.
pub fn score_answer_set(answer_set: &AnswerSet, library: &TestLibrary) -> TestReport {
    match answer_set {
        AnswerSet::BigFive(answers) => {
            TestReport::BigFive(big_five::score_big_five(answers, &library.big_five.test))
        }
        AnswerSet::Disc(answers) => TestReport::Disc(disc::score_disc(answers)),
        AnswerSet::Sjt(answers) => TestReport::Sjt(sjt::score_sjt(answers, &library.sjt.test)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use answers::{BigFiveAnswers, DiscAnswers, SjtAnswers};
    use catalog::{BigFiveDocument, BigFiveTest, DiscDocument, SjtDocument};

    fn empty_library() -> TestLibrary {
        TestLibrary {
            big_five: BigFiveDocument {
                test: BigFiveTest {
                    questions: vec![],
                    dimensions: vec![],
                },
            },
            disc: DiscDocument { test: vec![] },
            sjt: SjtDocument { test: vec![] },
        }
    }

    #[test]
    fn test_dispatch_matches_answer_sheet_kind() {
        let library = empty_library();

        let report = score_answer_set(&AnswerSet::BigFive(BigFiveAnswers::new()), &library);
        assert!(matches!(report, TestReport::BigFive(_)));

        let report = score_answer_set(&AnswerSet::Disc(DiscAnswers::new()), &library);
        assert!(matches!(report, TestReport::Disc(_)));

        let report = score_answer_set(&AnswerSet::Sjt(SjtAnswers::new()), &library);
        assert!(matches!(report, TestReport::Sjt(_)));
    }

    #[test]
    fn test_report_serializes_with_test_tag() {
        let library = empty_library();
        let report = score_answer_set(&AnswerSet::Disc(DiscAnswers::new()), &library);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["test"], "disc");
        assert!(json.get("report").is_some());
    }
}
