use crate::commands::TextQueryOutcome;
use crate::error::Result;
use crate::interpret;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, text: &str) -> Result<TextQueryOutcome> {
    let filter = interpret::interpret(text)?;
    log::debug!("query_text: {text:?} -> {filter:?}");
    let records = store.query(&filter)?;
    Ok(TextQueryOutcome {
        count: records.len(),
        query: text.to_string(),
        filter,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrandError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn natural_language_query_selects_records() {
        let fixture = StoreFixture::new().with_values(&["racecar", "race car", "hello"]);
        let outcome = run(&fixture.store, "all single word palindromic strings").unwrap();

        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.records[0].value, "racecar");
        assert_eq!(outcome.query, "all single word palindromic strings");
        assert_eq!(outcome.filter.word_count, Some(1));
        assert_eq!(outcome.filter.is_palindrome, Some(true));
    }

    #[test]
    fn length_query() {
        let fixture = StoreFixture::new().with_values(&["tiny", "a considerably longer value"]);
        let outcome = run(&fixture.store, "strings longer than 10 characters").unwrap();
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.records[0].value, "a considerably longer value");
    }

    #[test]
    fn unparsable_text_does_not_reach_the_store() {
        let fixture = StoreFixture::new().with_values(&["anything"]);
        let err = run(&fixture.store, "xyz").unwrap_err();
        assert!(matches!(err, StrandError::UnparsableQuery(_)));
    }
}
