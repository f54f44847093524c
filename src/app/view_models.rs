use super::*;

impl QuizApp {
    pub fn header_info(&self) -> HeaderInfo {
        HeaderInfo::from(self.session.progress())
    }

    /// `None` mientras el quiz no ha terminado.
    pub fn final_score(&self) -> Option<FinalScore> {
        self.session.summary().ok().map(|s| FinalScore::from(&s))
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.session
            .history()
            .iter()
            .map(ResultRow::from)
            .collect()
    }
}
