use super::classify::is_run_char;

/// Lowercase the first character of every run of letters and digits.
///
/// Everything else is passed through untouched, including the rest of each run.
/// Runs are delimited only by non-alphanumeric characters, not by case changes,
/// so `untitle("HelloWorld")` is `"helloWorld"`.
///
/// ```
/// use casify::untitle;
///
/// assert_eq!(untitle("STRING"), "sTRING");
/// assert_eq!(untitle("A String With Words In It"), "a string with words in it");
/// ```
pub fn untitle(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_run = false;

    for ch in input.chars() {
        if in_run {
            output.push(ch);
        } else {
            output.extend(ch.to_lowercase());
        }
        in_run = is_run_char(ch);
    }

    output
}
