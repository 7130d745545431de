use std::{
    env,
    io::{self, Write},
    process,
    sync::Arc,
};
use wordrec::{Dictionary, SuggestedCorrection, SuggestionConfig, WordRecommender, format_numbered};

fn main() -> io::Result<()> {
    env_logger::init();

    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/words.txt".into());

    let dictionary = match Dictionary::load(&dict_path) {
        Ok(dictionary) => Arc::new(dictionary),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let recommender = WordRecommender::new(dictionary);
    let config = SuggestionConfig::default();

    println!(
        "Word recommender - dictionary: {}\n:type text, :q to quit",
        dict_path
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for token in input.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }

            match recommender.check(word, &config) {
                Ok(SuggestedCorrection::Known) => {}
                Ok(SuggestedCorrection::NoSuggestions) => {
                    println!("\"{}\" is misspelled, no suggestions", word);
                }
                Ok(SuggestedCorrection::Suggestions(list)) => {
                    let words: Vec<_> = list.into_iter().map(|s| s.word).collect();
                    println!("\"{}\" is misspelled:\n{}", word, format_numbered(&words));
                }
                Err(e) => eprintln!("{}", e),
            }
        }
    }
    Ok(())
}
