//! Case tables shipped with the crate, one suite per algorithm.

use super::{Algorithm, Case, Suite, Value};

fn list(algorithm: Algorithm, name: &str, input: &[i64], expected: &[i64]) -> Case {
    Case::new(algorithm, name, input, Value::List(expected.to_vec()))
}

fn int(algorithm: Algorithm, name: &str, input: &[i64], expected: i64) -> Case {
    Case::new(algorithm, name, input, Value::Int(expected))
}

fn brackets() -> Suite {
    let table = [
        ("()", true),
        ("()[]{}", true),
        ("(]", false),
        ("([)]", false),
        ("{[]}", true),
        ("", true),
        ("((()", false),
        ("(()())", true),
        ("([{}])", true),
        ("([}{])", false),
        ("((()))", true),
        ("())", false),
        ("a(b)c[d]e{f}g", true),
    ];
    Suite::new(
        "brackets",
        table
            .into_iter()
            .map(|(text, valid)| Case::brackets(text, valid))
            .collect(),
    )
}

fn min_stack() -> Suite {
    use Algorithm::MinStack as M;
    Suite::new(
        "min-stack",
        vec![
            list(M, "positive pushes", &[3, 5, 2, 1, 4], &[3, 3, 2, 1, 1]),
            list(M, "negative pushes", &[-3, -1, -5, -2, -4], &[-3, -3, -5, -5, -5]),
            list(M, "repeated minimum", &[2, 1, 1, 3], &[2, 1, 1, 1]),
            list(M, "empty", &[], &[]),
        ],
    )
}

fn next_greater() -> Suite {
    use Algorithm::NextGreater as N;
    Suite::new(
        "next-greater",
        vec![
            list(N, "strictly increasing", &[1, 2, 3, 4, 5], &[2, 3, 4, 5, -1]),
            list(N, "strictly decreasing", &[5, 4, 3, 2, 1], &[-1, -1, -1, -1, -1]),
            list(N, "all equal", &[7, 7, 7, 7], &[-1, -1, -1, -1]),
            list(N, "alternating", &[2, 9, 1, 8, 3, 7], &[9, -1, 8, -1, 7, -1]),
            list(N, "single", &[42], &[-1]),
            list(N, "empty", &[], &[]),
            list(
                N,
                "large numbers",
                &[1000, 2000, 1500, 3000, 2500],
                &[2000, 3000, 3000, -1, -1],
            ),
            list(N, "negatives", &[-1, -3, -2, -4, 0], &[0, -2, 0, 0, -1]),
            list(N, "mixed signs", &[4, -2, 5, -1, 3], &[5, 5, -1, 3, -1]),
            list(
                N,
                "plateaus",
                &[2, 2, 1, 3, 3, 2, 4],
                &[3, 3, 3, 4, 4, 4, -1],
            ),
        ],
    )
}

fn histogram() -> Suite {
    use Algorithm::Histogram as H;
    Suite::new(
        "histogram",
        vec![
            int(H, "classic", &[2, 1, 5, 6, 2, 3], 10),
            int(H, "two bars", &[2, 4], 4),
            int(H, "single bar", &[5], 5),
            int(H, "empty", &[], 0),
            int(H, "all equal", &[3, 3, 3, 3, 3], 15),
            int(H, "decreasing", &[5, 4, 3, 2, 1], 9),
            int(H, "increasing", &[1, 2, 3, 4, 5], 9),
            int(H, "multiple peaks", &[6, 2, 5, 4, 5, 1, 6], 12),
            int(H, "valley", &[2, 1, 2], 3),
            int(H, "complex", &[3, 6, 5, 7, 4, 8, 1, 0], 20),
            int(H, "large numbers", &[1000, 2000, 1000], 3000),
            int(H, "single spike", &[1, 1, 1, 100, 1, 1, 1], 100),
        ],
    )
}

fn rain_water() -> Suite {
    use Algorithm::RainWater as R;
    Suite::new(
        "rain-water",
        vec![
            int(R, "basic", &[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6),
            int(R, "simple", &[3, 0, 2, 0, 4], 7),
            int(R, "three columns", &[2, 0, 2], 2),
            int(R, "ascending", &[1, 2, 3, 4, 5], 0),
            int(R, "descending", &[5, 4, 3, 2, 1], 0),
            int(R, "empty", &[], 0),
            int(R, "single", &[1], 0),
            int(R, "two columns", &[2, 1], 0),
            int(R, "flat", &[3, 3, 3, 3, 3], 0),
            int(R, "two peaks", &[1, 3, 2, 3, 1], 1),
            int(R, "valley", &[3, 1, 2, 1, 3], 5),
            int(R, "complex valley", &[4, 2, 0, 3, 2, 5], 9),
            int(R, "multiple valleys", &[0, 2, 0, 1, 0, 3, 0, 1, 0, 2, 0], 10),
            int(
                R,
                "large",
                &[
                    6, 4, 2, 0, 3, 2, 0, 3, 1, 4, 5, 3, 2, 7, 5, 3, 0, 1, 2, 1, 3, 4, 6, 8, 8, 5, 6,
                ],
                82,
            ),
            int(R, "alternating", &[1, 0, 1, 0, 1, 0, 1], 3),
            int(R, "deep valley", &[5, 0, 0, 0, 5], 15),
        ],
    )
}

fn asteroids() -> Suite {
    use Algorithm::Asteroids as A;
    Suite::new(
        "asteroids",
        vec![
            list(A, "small destroyed", &[5, 10, -5], &[5, 10]),
            list(A, "mutual annihilation", &[8, -8], &[]),
            list(A, "chain", &[10, 2, -5], &[10]),
            list(A, "diverging", &[-2, -1, 1, 2], &[-2, -1, 1, 2]),
            list(A, "left mover wins", &[1, 2, 3, -10], &[-10]),
            list(A, "empty", &[], &[]),
        ],
    )
}

fn subarray_min() -> Suite {
    use Algorithm::SubarrayMin as S;
    Suite::new(
        "subarray-min",
        vec![
            int(S, "small", &[3, 1, 2, 4], 17),
            int(S, "descending tail", &[11, 81, 94, 43, 3], 444),
            int(S, "ties", &[2, 2, 2], 12),
            int(S, "empty", &[], 0),
        ],
    )
}

/// Every builtin suite, in [`Algorithm::ALL`] order.
pub fn builtin_suites() -> Vec<Suite> {
    vec![
        brackets(),
        min_stack(),
        next_greater(),
        histogram(),
        rain_water(),
        asteroids(),
        subarray_min(),
    ]
}
