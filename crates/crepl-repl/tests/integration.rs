//! Integration tests for the crepl REPL.
//!
//! Scripts are fed line by line through `Repl::process_line`. Most tests use
//! a scripted toolchain; the ones at the bottom need a real `gcc`.

use crepl_kernel::ProcessOutput;
use crepl_repl::{Reply, Repl, ReplConfig};
use crepl_testutil::{require_gcc, ScriptedToolchain};

fn plain_config() -> ReplConfig {
    ReplConfig {
        color: false,
        ..ReplConfig::default()
    }
}

fn scripted() -> (Repl<ScriptedToolchain>, ScriptedToolchain) {
    let toolchain = ScriptedToolchain::new();
    let repl = Repl::with_toolchain(plain_config(), toolchain.clone()).expect("Failed to create REPL");
    (repl, toolchain)
}

/// Run each non-blank line through the REPL and collect printed text.
fn run_script<T: crepl_kernel::Toolchain>(repl: &mut Repl<T>, script: &str) -> Vec<String> {
    let mut outputs = Vec::new();
    for line in script.lines() {
        match repl.process_line(line) {
            Reply::Output(text) | Reply::Exit(text) => outputs.push(text),
            Reply::Silent => {}
        }
    }
    outputs
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn declaration_is_confirmed() {
    let (mut repl, toolchain) = scripted();

    let reply = repl.process_line("int x = 5;");

    assert_eq!(reply, Reply::Output("Added to global code\n".into()));
    assert!(toolchain.sources().is_empty());
}

#[test]
fn show_lists_globals_in_order() {
    let (mut repl, _) = scripted();

    let outputs = run_script(&mut repl, "int x = 5;\ndouble y;\nshow");

    assert_eq!(
        outputs.last().map(String::as_str),
        Some("Current global code:\nint x = 5;\ndouble y;\n")
    );
}

#[test]
fn clear_empties_globals_but_not_history() {
    let (mut repl, _) = scripted();

    let outputs = run_script(&mut repl, "int x = 5;\nclear\nshow");

    assert_eq!(outputs[1], "Global code cleared\n");
    assert_eq!(outputs[2], "Current global code:\n");
    assert_eq!(repl.kernel().session().history(), ["int x = 5;"]);
}

#[test]
fn history_is_one_indexed_and_includes_failures() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_compile_failure("error: boom");

    let outputs = run_script(&mut repl, "int x = 5;\nint bad(\nputs(\"hi\");\nhistory");

    assert_eq!(
        outputs.last().map(String::as_str),
        Some("Command history:\n1: int x = 5;\n2: int bad(\n3: puts(\"hi\");\n")
    );
}

#[test]
fn commands_and_blank_lines_stay_out_of_history() {
    let (mut repl, _) = scripted();

    run_script(&mut repl, "help\n\n   \nshow\nclear\nhistory\nint x;");

    assert_eq!(repl.kernel().session().history(), ["int x;"]);
}

#[test]
fn blank_line_is_silent() {
    let (mut repl, _) = scripted();
    assert_eq!(repl.process_line("   "), Reply::Silent);
}

#[test]
fn exit_and_quit_leave_the_loop() {
    let (mut repl, _) = scripted();
    assert_eq!(repl.process_line("exit"), Reply::Exit("Goodbye!\n".into()));
    assert_eq!(repl.process_line("  quit "), Reply::Exit("Goodbye!\n".into()));
}

#[test]
fn help_mentions_every_command() {
    let (mut repl, _) = scripted();

    let Reply::Output(text) = repl.process_line("help") else {
        panic!("help should print");
    };
    for word in ["help", "clear", "show", "history", "exit/quit"] {
        assert!(text.contains(word), "help text missing {word}");
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn stdout_is_printed_verbatim() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput::success("a\nb\n"));

    assert_eq!(repl.process_line("puts(\"a\"); puts(\"b\");"), Reply::Output("a\nb\n".into()));
}

#[test]
fn missing_final_newline_is_added() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput::success("no newline"));

    assert_eq!(
        repl.process_line("printf(\"no newline\");"),
        Reply::Output("no newline\n".into())
    );
}

#[test]
fn empty_program_output_is_silent() {
    let (mut repl, _) = scripted();
    assert_eq!(repl.process_line("(void)0;"), Reply::Silent);
}

#[test]
fn runtime_stderr_is_labelled() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput {
        code: Some(1),
        stdout: "partial\n".into(),
        stderr: "bad thing\n".into(),
    });

    assert_eq!(
        repl.process_line("fail();"),
        Reply::Output("partial\nruntime error: bad thing\n".into())
    );
}

#[test]
fn nonzero_exit_without_stderr_is_not_reported() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput {
        code: Some(4),
        stdout: String::new(),
        stderr: String::new(),
    });

    assert_eq!(repl.process_line("exit(4);"), Reply::Silent);
}

#[test]
fn killed_program_is_reported() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput {
        code: None,
        stdout: String::new(),
        stderr: String::new(),
    });

    assert_eq!(
        repl.process_line("abort();"),
        Reply::Output("runtime error: terminated by signal\n".into())
    );
}

#[test]
fn killed_program_keeps_its_output_and_stderr() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_run(ProcessOutput {
        code: None,
        stdout: "before\n".into(),
        stderr: "assertion failed\n".into(),
    });

    assert_eq!(
        repl.process_line("assert(0);"),
        Reply::Output(
            "before\nruntime error: assertion failed\nruntime error: terminated by signal\n".into()
        )
    );
}

#[test]
fn diagnostics_keep_inner_layout() {
    let (mut repl, toolchain) = scripted();
    let diagnostics = "unit.c: In function 'main':\nunit.c:7:5: error: expected ';'\n    7 |     x\n      |     ^\n";
    toolchain.push_compile_failure(diagnostics);

    let Reply::Output(text) = repl.process_line("x") else {
        panic!("compile failure should print");
    };
    assert_eq!(text, format!("compile error: {diagnostics}"));
}

#[test]
fn compile_failure_is_labelled() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_compile_failure("unit.c:7:5: error: expected expression\n");

    assert_eq!(
        repl.process_line("int bad("),
        Reply::Output("compile error: unit.c:7:5: error: expected expression\n".into())
    );
    assert_eq!(toolchain.executions(), 0);
}

#[test]
fn launch_failure_is_an_execution_error() {
    let (mut repl, toolchain) = scripted();
    toolchain.push_compiler_missing();

    let Reply::Output(text) = repl.process_line("x;") else {
        panic!("launch failure should print");
    };
    assert!(text.starts_with("execution error: "));

    // The loop keeps going
    assert_eq!(repl.process_line("int z;"), Reply::Output("Added to global code\n".into()));
}

#[test]
fn fragments_are_trimmed_before_submission() {
    let (mut repl, toolchain) = scripted();

    repl.process_line("   puts(\"x\");   ");

    assert!(toolchain.sources()[0].contains("\n    puts(\"x\");\n"));
    assert_eq!(repl.kernel().session().history(), ["puts(\"x\");"]);
}

#[test]
fn colored_messages_carry_escapes() {
    let toolchain = ScriptedToolchain::new();
    let mut repl = Repl::with_toolchain(ReplConfig::default(), toolchain).expect("Failed to create REPL");

    let Reply::Output(text) = repl.process_line("int x;") else {
        panic!("declaration should print");
    };
    assert!(text.contains('\u{1b}'));
    assert!(text.contains("Added to global code"));
}

#[test]
fn shutdown_removes_scratch_directory() {
    let (repl, _) = scripted();
    let dir = repl.kernel().scratch_path().to_path_buf();

    repl.shutdown().expect("shutdown");

    assert!(!dir.exists());
}

// ============================================================================
// Real compiler
// ============================================================================

#[test]
fn gcc_session_round_trip() {
    require_gcc!();
    let mut repl = Repl::new(plain_config()).expect("Failed to create REPL");

    let outputs = run_script(
        &mut repl,
        r#"
        int x = 5;
        printf("x = %d\n", x);
        1 + 2 * 3
        int bad(
        history
        "#,
    );

    assert_eq!(outputs[0], "Added to global code\n");
    assert_eq!(outputs[1], "x = 5\n");
    assert_eq!(outputs[2], "Result: 7\n");
    assert!(outputs[3].starts_with("compile error: "));
    assert!(outputs[3].len() > "compile error: \n".len());
    assert_eq!(
        outputs[4],
        "Command history:\n1: int x = 5;\n2: printf(\"x = %d\\n\", x);\n3: 1 + 2 * 3\n4: int bad(\n"
    );
}

#[cfg(unix)]
#[test]
fn gcc_aborted_program_is_not_silent() {
    require_gcc!();
    let mut repl = Repl::new(plain_config()).expect("Failed to create REPL");

    let reply = repl.process_line("abort();");

    assert_eq!(reply, Reply::Output("runtime error: terminated by signal\n".into()));
}
