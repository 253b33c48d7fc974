//! Function Registry

use crate::{FunctionMeta, FunctionPlugin};
use reform_core::{ReformError, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Name -> function table handed to whatever evaluates pipelines.
///
/// Built once, then shared read-only. Lookups are case-insensitive and
/// resolve aliases to the canonical function.
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    aliases: HashMap<String, String>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let meta = f.meta();
        let name = meta.name.to_lowercase();
        for alias in meta.aliases {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        let key = self.resolve(name);
        self.functions.get(key.as_str()).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_function(name).is_some()
    }

    /// Number of distinct functions (aliases not counted)
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Canonical names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.values().map(|f| f.meta().name).collect();
        names.sort_unstable();
        names
    }

    fn resolve(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        match self.aliases.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }

    pub fn call_function(&self, name: &str, args: &[Value]) -> Result<Value, ReformError> {
        match self.get_function(name) {
            Some(f) => {
                tracing::debug!(function = name, argc = args.len(), "dispatching function");
                f.call(args).map_err(|e| e.in_function(f.meta().name))
            }
            None => {
                tracing::warn!(function = name, "unknown function");
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = ReformError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use help() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Find registered names (canonical and aliases) similar to `name`
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .functions
            .keys()
            .chain(self.aliases.keys())
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Highest score first, ties alphabetical
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Result<Value, ReformError> {
        match name {
            Some(n) => self.help_for(n),
            None => Ok(self.general_help()),
        }
    }

    fn help_for(&self, name: &str) -> Result<Value, ReformError> {
        match self.get_function(name) {
            Some(f) => Ok(Value::Map(Self::function_to_help(f.meta()))),
            None => Err(ReformError::undefined_func(name)
                .with_suggestion("Call help() for the list of functions")),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: HashMap<String, Vec<String>> = HashMap::new();
        for f in self.functions.values() {
            let meta = f.meta();
            funcs_by_cat
                .entry(meta.category.to_string())
                .or_default()
                .push(meta.name.to_string());
        }
        help.insert(
            "functions".to_string(),
            Value::Map(
                funcs_by_cat
                    .into_iter()
                    .map(|(k, mut v)| {
                        v.sort();
                        (k, Value::List(v.into_iter().map(Value::Text).collect()))
                    })
                    .collect(),
            ),
        );

        help.insert(
            "usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()),
        );

        Value::Map(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert(
            "aliases".to_string(),
            Value::List(meta.aliases.iter().map(|a| Value::Text(a.to_string())).collect()),
        );
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert(
            "args".to_string(),
            Value::List(
                meta.args
                    .iter()
                    .map(|a| {
                        let mut arg = HashMap::new();
                        arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                        arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                        arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                        arg.insert("optional".to_string(), Value::Bool(a.optional));
                        Value::Map(arg)
                    })
                    .collect(),
            ),
        );
        help.insert(
            "examples".to_string(),
            Value::List(meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()),
        );
        help
    }

    /// Functions in `category` or any of its `category/...` subcategories
    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self
            .functions
            .values()
            .map(|f| f.meta())
            .filter(|meta| category.map_or(true, |c| in_category(meta.category, c)))
            .collect();
        metas.sort_by_key(|meta| meta.name);

        let funcs: Vec<Value> = metas
            .into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Map(obj)
            })
            .collect();
        Value::List(funcs)
    }

    /// All function metadata as JSON, sorted by name
    pub fn describe_json(&self) -> serde_json::Value {
        let mut metas: Vec<FunctionMeta> = self.functions.values().map(|f| f.meta()).collect();
        metas.sort_by_key(|meta| meta.name);
        serde_json::json!({ "functions": metas })
    }
}

fn in_category(category: &str, wanted: &str) -> bool {
    match category.strip_prefix(wanted) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
