use fuzz_dsu::{run_differential, Op};

fn main() {
    afl::fuzz!(|data: (u8, Vec<Op>)| {
        let (len, ops) = data;
        run_differential(len.into(), &ops);
    });
}
