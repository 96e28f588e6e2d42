//! Procedures over evaluated arguments: arithmetic, comparison and type
//! predicates.

use std::borrow::Cow;

use crate::function::{Args, EvalErr, ExpectedCount, Ret};
use crate::primitive::Number;
use crate::sexp::Sexp;


fn number(arg: &Sexp) -> Result<Number, EvalErr> {
    match arg.as_number() {
        Some(num) => Ok(num),
        None => err!(InvalidArgument {
            given: arg.clone(),
            expected: Cow::Borrowed("a Number"),
        }),
    }
}

fn numbers(args: &Args) -> Result<Vec<Number>, EvalErr> {
    args.iter().map(number).collect()
}

fn at_least(args: &Args, minimum: usize) -> Result<(), EvalErr> {
    if args.len() < minimum {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::AtLeast(minimum),
        });
    }
    Ok(())
}

fn exactly(args: &Args, count: usize) -> Result<(), EvalErr> {
    if args.len() != count {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(count),
        });
    }
    Ok(())
}

/// Folds the numbers after the first into the first.
fn accumulate(args: &Args, step: fn(Number, Number) -> Result<Number, EvalErr>) -> Ret {
    at_least(args, 1)?;
    let nums = numbers(args)?;
    let mut curr = nums[0];
    for &num in &nums[1..] {
        curr = step(curr, num)?;
    }
    Ok(curr.into())
}

fn overflow(op: &'static str) -> EvalErr {
    EvalErr::ArithmeticOverflow(op)
}


pub fn add(args: Args) -> Ret {
    let mut curr: Number = 0;
    for num in numbers(&args)? {
        curr = curr.checked_add(num).ok_or_else(|| overflow("+"))?;
    }
    Ok(curr.into())
}

pub fn mul(args: Args) -> Ret {
    let mut curr: Number = 1;
    for num in numbers(&args)? {
        curr = curr.checked_mul(num).ok_or_else(|| overflow("*"))?;
    }
    Ok(curr.into())
}

pub fn sub(args: Args) -> Ret {
    accumulate(&args, |a, b| a.checked_sub(b).ok_or_else(|| overflow("-")))
}

/// Integer division truncating toward zero.
pub fn div(args: Args) -> Ret {
    accumulate(&args, |a, b| {
        if b == 0 {
            return err!(DivisionByZero);
        }
        a.checked_div(b).ok_or_else(|| overflow("/"))
    })
}

pub fn max(args: Args) -> Ret {
    at_least(&args, 1)?;
    let nums = numbers(&args)?;
    Ok(nums.into_iter().fold(Number::MIN, Number::max).into())
}

pub fn min(args: Args) -> Ret {
    at_least(&args, 1)?;
    let nums = numbers(&args)?;
    Ok(nums.into_iter().fold(Number::MAX, Number::min).into())
}

pub fn abs(args: Args) -> Ret {
    exactly(&args, 1)?;
    let num = number(&args[0])?;
    Ok(num.checked_abs().ok_or_else(|| overflow("abs"))?.into())
}


/// Whether `holds` is true of every adjacent pair of arguments.
///
/// Every argument is type-checked, even once the answer is known.
fn pairwise(args: &Args, holds: fn(Number, Number) -> bool) -> Ret {
    let nums = numbers(args)?;
    Ok(Sexp::boolean(nums.windows(2).all(|w| holds(w[0], w[1]))))
}

pub fn num_eq(args: Args) -> Ret {
    pairwise(&args, |a, b| a == b)
}

pub fn gt(args: Args) -> Ret {
    pairwise(&args, |a, b| a > b)
}

pub fn lt(args: Args) -> Ret {
    pairwise(&args, |a, b| a < b)
}

pub fn ge(args: Args) -> Ret {
    pairwise(&args, |a, b| a >= b)
}

pub fn le(args: Args) -> Ret {
    pairwise(&args, |a, b| a <= b)
}


pub fn is_number(args: Args) -> Ret {
    Ok(Sexp::boolean(args.iter().all(|arg| arg.as_number().is_some())))
}

pub fn is_boolean(args: Args) -> Ret {
    Ok(Sexp::boolean(args.iter().all(|arg| {
        arg.as_symbol().map_or(false, |symbol| symbol.is_boolean())
    })))
}

pub fn not(args: Args) -> Ret {
    exactly(&args, 1)?;
    Ok(Sexp::boolean(args[0].is_false()))
}


#[cfg(test)]
#[path = "./numeric_test.rs"]
mod numeric_test;
