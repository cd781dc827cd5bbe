//! Execution phase: run checked operations against fresh container state
//!
//! Storage is erased. The only runtime kind checks are the conversions a
//! fetch performs, which is where raw-type misuse finally surfaces.

use crate::checker::CheckedScenario;
use crate::container::{Container, ContainerDecl, ContainerId};
use crate::diagnostic::Diagnostic;
use crate::error::RunnerError;
use crate::kind::KindTag;
use crate::scenario::Operation;
use crate::sink::TraceSink;
use indexmap::IndexMap;

/// What happened while executing a checked scenario
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Operations that completed
    pub executed: usize,
    /// Runtime failure that stopped execution
    pub failure: Option<Diagnostic>,
    /// Results of fetches, type checks, class literals and counts
    pub observations: Vec<String>,
}

impl Execution {
    /// Whether every operation completed
    #[inline]
    #[must_use]
    pub fn completed(&self) -> bool {
        self.failure.is_none()
    }
}

enum Step {
    Done(Option<String>),
    Failed(String),
}

/// Runs a [`CheckedScenario`]
pub struct Executor<'s> {
    sink: &'s mut dyn TraceSink,
    trace: bool,
}

impl<'s> Executor<'s> {
    /// Create an executor writing trace lines to `sink` when `trace` is set
    pub fn new(sink: &'s mut dyn TraceSink, trace: bool) -> Self {
        Self { sink, trace }
    }

    /// Execute every operation in order, stopping at the first runtime failure
    ///
    /// # Errors
    /// [`RunnerError::Internal`] if an operation names a container that the
    /// check phase did not resolve.
    pub fn run(&mut self, checked: &CheckedScenario<'_>) -> Result<Execution, RunnerError> {
        let scenario = checked.scenario();
        let mut state: IndexMap<ContainerId, Container> = checked
            .declared()
            .iter()
            .map(|(id, declared)| {
                let decl = ContainerDecl::new(id.clone(), *declared);
                (id.clone(), Container::from_decl(&decl))
            })
            .collect();

        let mut execution = Execution::default();
        self.line(format!("== {}", scenario.name));

        for (index, operation) in scenario.operations.iter().enumerate() {
            self.snapshot("before", index, operation, &state);

            match Self::apply(operation, &mut state)? {
                Step::Done(observation) => {
                    execution.executed += 1;
                    tracing::debug!(scenario = %scenario.name, index, op = %operation, "executed");
                    if let Some(observation) = observation {
                        self.line(format!("  [{index}] => {observation}"));
                        execution.observations.push(observation);
                    }
                    self.snapshot("after", index, operation, &state);
                }
                Step::Failed(message) => {
                    tracing::debug!(scenario = %scenario.name, index, %message, "runtime failure");
                    self.line(format!("  [{index}] !! {message}"));
                    execution.failure = Some(Diagnostic::runtime(index, message));
                    break;
                }
            }
        }

        Ok(execution)
    }

    fn apply(
        operation: &Operation,
        state: &mut IndexMap<ContainerId, Container>,
    ) -> Result<Step, RunnerError> {
        let step = match operation {
            Operation::Insert { value, target } | Operation::InsertUnchecked { value, target } => {
                container_mut(state, target)?.push(value.clone());
                Step::Done(None)
            }
            Operation::Fetch {
                target,
                index,
                cast,
            } => fetch(operation, container(state, target)?, *index, *cast),
            Operation::TypeCheck { value, asserted } => {
                let holds = !value.is_null() && value.kind_of().is_subtype_of(asserted.erased());
                Step::Done(Some(format!("{operation} = {holds}")))
            }
            Operation::ClassLiteral { ty } => {
                Step::Done(Some(format!("{operation} = class {}", ty.erased())))
            }
            Operation::CountCommon { left, right } => {
                let other = container(state, right)?;
                let count = container(state, left)?
                    .elements()
                    .iter()
                    .filter(|value| other.contains(value))
                    .count();
                Step::Done(Some(format!("{operation} = {count}")))
            }
            Operation::Pass { source, .. } => {
                container(state, source)?;
                Step::Done(None)
            }
        };
        Ok(step)
    }

    fn snapshot(
        &mut self,
        label: &str,
        index: usize,
        operation: &Operation,
        state: &IndexMap<ContainerId, Container>,
    ) {
        if !self.trace {
            return;
        }
        let mut ids = operation.referenced_ids();
        ids.dedup();
        let states: Vec<String> = ids
            .into_iter()
            .filter_map(|id| state.get(id))
            .map(Container::describe)
            .collect();
        self.sink
            .write(&format!("  [{index}] {label:<6} {operation} | {}", states.join("; ")));
    }

    fn line(&mut self, line: String) {
        if self.trace {
            self.sink.write(&line);
        }
    }
}

/// Read one element and apply the explicit cast or the implicit conversion
fn fetch(
    operation: &Operation,
    container: &Container,
    index: usize,
    cast: Option<KindTag>,
) -> Step {
    let Some(value) = container.get(index) else {
        return Step::Failed(format!(
            "index {index} out of bounds for {} of length {}",
            container.id(),
            container.len()
        ));
    };

    let kind = value.kind_of();
    match cast.or(container.declared().implicit_conversion()) {
        Some(conversion) if !kind.is_subtype_of(conversion) => Step::Failed(format!(
            "class cast failure: {kind} cannot be cast to {conversion} ({operation} read {value})"
        )),
        _ => Step::Done(Some(format!("{operation} = {value}"))),
    }
}

fn container<'c>(
    state: &'c IndexMap<ContainerId, Container>,
    id: &ContainerId,
) -> Result<&'c Container, RunnerError> {
    state
        .get(id)
        .ok_or_else(|| RunnerError::Internal(format!("container '{id}' missing after check")))
}

fn container_mut<'c>(
    state: &'c mut IndexMap<ContainerId, Container>,
    id: &ContainerId,
) -> Result<&'c mut Container, RunnerError> {
    state
        .get_mut(id)
        .ok_or_else(|| RunnerError::Internal(format!("container '{id}' missing after check")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{CheckVerdict, Checker};
    use crate::kind::{ElementKind, KindTag, TypeExpr};
    use crate::scenario::Scenario;
    use crate::sink::NullSink;
    use crate::value::Value;

    fn execute(scenario: &Scenario, sink: &mut dyn TraceSink) -> Execution {
        match Checker::new().check(scenario).unwrap() {
            CheckVerdict::Accepted(checked) => Executor::new(sink, true).run(&checked).unwrap(),
            CheckVerdict::Rejected { .. } => panic!("scenario should pass the check phase"),
        }
    }

    #[test]
    fn raw_list_cast_fails_on_second_element() {
        let scenario = Scenario::builder("raw")
            .container("ints", ElementKind::Unconstrained)
            .op(Operation::insert("ss", "ints"))
            .op(Operation::insert(20, "ints"))
            .op(Operation::fetch_as("ints", 0, KindTag::String))
            .op(Operation::fetch_as("ints", 1, KindTag::String))
            .build();

        let execution = execute(&scenario, &mut NullSink);
        assert_eq!(execution.executed, 3);
        let failure = execution.failure.unwrap();
        assert_eq!(failure.index, 3);
        assert!(failure.message.contains("Integer cannot be cast to String"));
        assert_eq!(execution.observations, vec!["(String) ints.get(0) = \"ss\"".to_string()]);
    }

    #[test]
    fn implicit_conversion_on_fixed_type() {
        let scenario = Scenario::builder("alias")
            .container("strings", ElementKind::FixedType(KindTag::String))
            .op(Operation::insert_unchecked(42, "strings"))
            .op(Operation::fetch("strings", 0))
            .build();

        let execution = execute(&scenario, &mut NullSink);
        assert_eq!(execution.executed, 1);
        assert!(!execution.completed());
    }

    #[test]
    fn out_of_bounds_fetch_fails() {
        let scenario = Scenario::builder("empty-read")
            .container("q", ElementKind::UnknownWildcard)
            .op(Operation::fetch("q", 0))
            .build();

        let execution = execute(&scenario, &mut NullSink);
        assert_eq!(execution.executed, 0);
        assert!(execution.failure.unwrap().message.contains("out of bounds"));
    }

    #[test]
    fn type_check_and_count_observations() {
        let scenario = Scenario::builder("reads")
            .container("s1", ElementKind::UnknownWildcard)
            .container("s2", ElementKind::Unconstrained)
            .container("raw", ElementKind::Unconstrained)
            .op(Operation::insert(1, "raw"))
            .op(Operation::insert(2, "raw"))
            .op(Operation::insert(2, "s2"))
            .op(Operation::count_common("raw", "s2"))
            .op(Operation::type_check(
                Value::container("s1"),
                TypeExpr::Container(ElementKind::UnknownWildcard),
            ))
            .op(Operation::type_check(Value::Null, TypeExpr::Simple(KindTag::Object)))
            .build();

        let execution = execute(&scenario, &mut NullSink);
        assert!(execution.completed());
        assert_eq!(
            execution.observations,
            vec![
                "numElementsInCommon(raw, s2) = 1".to_string(),
                "&s1 instanceof List<?> = true".to_string(),
                "null instanceof Object = false".to_string(),
            ]
        );
    }

    #[test]
    fn trace_shows_state_before_and_after() {
        let scenario = Scenario::builder("trace")
            .container("C2", ElementKind::Unconstrained)
            .op(Operation::insert("ss", "C2"))
            .build();

        let mut lines: Vec<String> = Vec::new();
        execute(&scenario, &mut lines);
        assert_eq!(lines[0], "== trace");
        assert!(lines[1].contains("before") && lines[1].ends_with("C2: List = []"));
        assert!(lines[2].contains("after") && lines[2].ends_with("C2: List = [\"ss\"]"));
    }

    #[test]
    fn trace_disabled_writes_nothing() {
        let scenario = Scenario::builder("quiet")
            .container("C2", ElementKind::Unconstrained)
            .op(Operation::insert("ss", "C2"))
            .build();

        let mut lines: Vec<String> = Vec::new();
        if let CheckVerdict::Accepted(checked) = Checker::new().check(&scenario).unwrap() {
            Executor::new(&mut lines, false).run(&checked).unwrap();
        }
        assert!(lines.is_empty());
    }
}
