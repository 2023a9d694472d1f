//! Tour of the algorithm families on small integer sequences.
//!
//! Run with `cargo run --example walkthrough`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seqalg::functional::project;
use seqalg::modifying::{remove_if, rotate, sample, shuffle, unique};
use seqalg::non_modifying::{count_if, find_end, search_n};
use seqalg::set::{set_intersection, set_union};
use seqalg::{minmax, sentinel, SliceWriter};

fn main() -> anyhow::Result<()> {
    let mut v = vec![1, 2, 2, 3, 2, 2, 1];
    println!("input            {v:?}");
    println!("first 2,2        {:?}", search_n(&v, 2, &2));
    println!("last 2,1         {:?}", find_end(&v, &[2, 1]));
    println!("odd count        {}", count_if(&v, project(|r: &i32| *r == 1, |x: &i32| x % 2)));
    println!("minmax positions {:?}", minmax::minmax_element(&v));

    let len = unique(&mut v);
    println!("unique           {:?}", &v[..len]);

    let mut w: Vec<i32> = (1..=8).collect();
    let first = rotate(&mut w, 3)?;
    println!("rotate by 3      {w:?} (old front now at {first})");
    let len = remove_if(&mut w, |x| x % 2 == 0);
    println!("drop evens       {:?}", &w[..len]);

    let mut union = Vec::new();
    set_union([1, 3, 5, 7], [2, 3, 4], &mut union)?;
    let mut both = [0; 4];
    let mut writer = SliceWriter::new(&mut both);
    set_intersection([1, 3, 5, 7], [3, 5, 9], &mut writer)?;
    println!("union            {union:?}");
    println!("intersection     {:?}", writer.into_written());

    let mut rng = StdRng::seed_from_u64(2024);
    let mut deck: Vec<u32> = (1..=10).collect();
    shuffle(&mut deck, &mut rng);
    let mut hand = Vec::new();
    sample(&deck, 3, &mut hand, &mut rng)?;
    println!("shuffled         {deck:?}");
    println!("sampled          {hand:?}");

    let c_string = b"hello\0world";
    let text: String = sentinel::until(c_string.iter().copied(), sentinel::Value(0u8))
        .map(char::from)
        .collect();
    println!("until NUL        {text}");
    Ok(())
}
