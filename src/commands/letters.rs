//! Letter frequency report command

use crate::output::print_letter_frequency;
use crate::wordlist::Dictionary;

/// Print the most common letters across the dictionary
pub fn run_letters(dictionary: &Dictionary, count: usize) {
    let top = dictionary.most_common_letters(count);
    print_letter_frequency(&top);
}
