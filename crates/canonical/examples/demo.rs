use canonical::tokenize;

fn main() {
    let input = "Hello world & good morning. The date is 18/05/2016";

    println!("input: {input:?}");
    for token in tokenize(input) {
        println!("{:>3}..{:<3} {:?}", token.start, token.end, token.text);
    }
}
