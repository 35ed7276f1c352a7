use median_core::compute_median;
use median_core::median::MedianReport;
use median_core::util::join_values;

fn main() {
    // predefined test cases
    let tests: Vec<Vec<i64>> = vec![
        vec![5, 2, 9, 4, 7],             // expect 5
        vec![10, 8, 2, 4],               // expect 6
        vec![1],                         // expect 1
        vec![-1, 529, -5, -50, 52],      // expect -1
        vec![],                          // expect error
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9], // expect 5
    ];

    println!("pre-made tests");

    for test in &tests {
        match compute_median(test) {
            Ok(median) => println!("{}", MedianReport::new(test, median)),
            Err(e) => {
                println!("{:<35} {:>15}", "Values", join_values(test));
                eprintln!("input error: {}", e);
            }
        }
    }
}
