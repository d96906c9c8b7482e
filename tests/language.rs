use std::fs;

use whilst::execute;

fn run(source: &str, inputs: &[u64]) -> u64 {
    match execute(source, inputs) {
        Ok(value) => value,
        Err(e) => panic!("Program failed to parse: {e}"),
    }
}

fn assert_rejected(source: &str) {
    if execute(source, &[]).is_ok() {
        panic!("Program parsed but was expected to fail")
    }
}

#[test]
fn writing_another_register_leaves_x0_untouched() {
    assert_eq!(run("x1 := x0 + 5;", &[]), 0);
}

#[test]
fn addition_reads_preloaded_input() {
    assert_eq!(run("x0 := x1 + 3;", &[4]), 7);
}

#[test]
fn subtraction_saturates_at_zero() {
    assert_eq!(run("x0 := x1 - 10;", &[3]), 0);
    assert_eq!(run("x0 := x1 - 2;", &[3]), 1);
}

#[test]
fn target_and_source_may_be_equal() {
    assert_eq!(run("x0 := x0 + 1; x0 := x0 + 1;", &[]), 2);
}

#[test]
fn empty_program_returns_zero() {
    assert_eq!(run("", &[]), 0);
    assert_eq!(run("", &[7]), 0);
}

#[test]
fn inputs_preload_registers_from_x1() {
    assert_eq!(run("x0 := x3 + 0;", &[10, 20, 30]), 30);
}

#[test]
fn countdown_accumulates_into_x0() {
    let source = "
        while (x1 > 0) do
            x0 := x0 + 1;
            x1 := x1 - 1;
        end;
    ";
    assert_eq!(run(source, &[5]), 5);
    assert_eq!(run(source, &[0]), 0);
}

#[test]
fn copy_then_countdown_doubles() {
    let source = "
        x0 := x1 + 0;
        while (x1 > 0) do
            x0 := x0 + 1;
            x1 := x1 - 1;
        end;
    ";
    assert_eq!(run(source, &[5]), 10);
}

#[test]
fn nested_loops_multiply() {
    let source = "
        while (x1 > 0) do
            x3 := x2 + 0;
            while (x3 > 0) do
                x0 := x0 + 1;
                x3 := x3 - 1;
            end;
            x1 := x1 - 1;
        end;
    ";
    assert_eq!(run(source, &[3, 4]), 12);
    assert_eq!(run(source, &[4, 0]), 0);
    assert_eq!(run(source, &[0, 4]), 0);
}

#[test]
fn empty_loop_body_with_zero_test_terminates() {
    assert_eq!(run("while (x1 > 0) do end;", &[]), 0);
}

#[test]
fn case_and_whitespace_are_insignificant() {
    assert_eq!(run("X0 := X1 + 2 ;", &[1]), 3);
    assert_eq!(run("WHILE ( x1 > 0 ) DO x0:=x0+2; x1:=x1-1; END;", &[3]), 6);
}

#[test]
fn comment_lines_are_stripped() {
    let source = "# copies x1 into x0
x0 := x1 + 0;
# a trailing comment is fine too
";
    assert_eq!(run(source, &[9]), 9);
}

#[test]
fn unmatched_loop_markers_are_rejected() {
    assert_rejected("end;");
    assert_rejected("x0 := x0 + 1; end;");
    assert_rejected("while (x1 > 0) do x1 := x1 - 1;");
    assert_rejected("while (x1 > 0) do while (x2 > 0) do end;");
}

#[test]
fn unrecognized_input_is_rejected() {
    assert_rejected("frobnicate");
    assert_rejected("x0 := x1 * 2;");
    assert_rejected("x0 = x1 + 2;");
    assert_rejected("x0 := x1 + 2");
    assert_rejected("x0 := 2 + x1;");
    assert_rejected("while (x1 > 0) x1 := x1 - 1; end;");
}

#[test]
fn example_program_works() {
    let source = fs::read_to_string("tests/example.while").expect("missing file");
    assert_eq!(run(&source, &[6, 7]), 42);
}
