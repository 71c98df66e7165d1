use std::ops::ControlFlow;

/// Feeds `f` its own output until it breaks.
pub fn loop_try_fold<F, B, C>(init: C, mut f: F) -> B
where
    F: FnMut(C) -> ControlFlow<B, C>,
{
    let mut accum = init;

    loop {
        match f(accum) {
            ControlFlow::Continue(c) => accum = c,
            ControlFlow::Break(b) => break b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_with_the_final_value() {
        let result = loop_try_fold(1u32, |n| {
            if n > 100 {
                ControlFlow::Break(n)
            } else {
                ControlFlow::Continue(n * 3)
            }
        });

        assert_eq!(result, 243);
    }
}
