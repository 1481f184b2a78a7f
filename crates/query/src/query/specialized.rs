//! Script and match-all / match-none builders.

use crate::options::{Mutation, QueryOption};
use crate::types::{MatchAllQuery, MatchNoneQuery, Query, Script, ScriptQuery};

pub fn match_all() -> QueryOption {
    Mutation::new(|query: &mut Query| query.match_all = Some(MatchAllQuery::default()))
}

pub fn match_none() -> QueryOption {
    Mutation::new(|query: &mut Query| query.match_none = Some(MatchNoneQuery::default()))
}

/// Filters documents with a script that returns a boolean.
pub fn script(script: Script) -> QueryOption {
    script_with(script, |_| {})
}

pub fn script_with(
    script: Script,
    configure: impl FnOnce(&mut ScriptQuery) + Send + 'static,
) -> QueryOption {
    let mut body = ScriptQuery {
        script,
        ..Default::default()
    };
    Mutation::new(move |query: &mut Query| {
        configure(&mut body);
        query.script = Some(body);
    })
}
