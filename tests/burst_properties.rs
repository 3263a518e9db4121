// tests/burst_properties.rs

use procburst::config::{CommandDescriptor, RunConfig};
use procburst::engine::{BurstRunner, RunOutcome};
use procburst_test_utils::fake_launcher::{ScriptedLauncher, Step};
use procburst_test_utils::lines;
use proptest::prelude::*;

fn run_scripted(codes: &[i32]) -> (Vec<String>, RunOutcome) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();

    let steps = codes.iter().copied().map(Step::exit).collect();
    let cfg = RunConfig::new(codes.len(), CommandDescriptor::new("./client"));
    let mut out = Vec::new();

    let report = rt
        .block_on(BurstRunner::new(cfg, ScriptedLauncher::new(steps), &mut out).run())
        .unwrap();
    (lines(&out), report.outcome)
}

proptest! {
    #[test]
    fn n_progress_lines_then_n_result_lines_in_order(
        codes in proptest::collection::vec(-15i32..=255, 0..40)
    ) {
        let n = codes.len();
        let (lines, outcome) = run_scripted(&codes);

        prop_assert_eq!(outcome, RunOutcome::Completed);
        prop_assert_eq!(lines.len(), 2 * n);

        for (i, line) in lines[..n].iter().enumerate() {
            prop_assert_eq!(line, &format!("{i} executed"));
        }
        for (code, line) in codes.iter().zip(&lines[n..]) {
            prop_assert_eq!(line, &format!("['./client' exited with {code}]"));
        }
    }
}
