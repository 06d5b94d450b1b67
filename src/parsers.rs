#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::types::StudentMark;

peg::parser! {
    /// grammars for the lines of a marks file
    pub grammar parser() for str {
        /// matches spaces, tabs and a stray carriage return
        rule blank() = quiet!{[' ' | '\t' | '\r']+}

        /// matches any sequence of 1 or more digits
        rule digits() = ['0'..='9']+

        /// matches an optional leading sign
        rule sign() = ['+' | '-']

        /// matches a decimal exponent, eg. `e-3`
        rule exponent() = ['e' | 'E'] sign()? digits()

        /// parses an unsigned integer
        rule unsigned() -> u64
            = n:$(digits()) {? n.parse().or(Err("unsigned integer")) }

        /// parses a decimal number such as `72`, `-3.5`, `.5` or `1e2`
        rule number() -> f64
            = n:$(sign()? (digits() ("." digits()?)? / "." digits()) exponent()?)
            {? n.parse().or(Err("number")) }

        /// parses the first line: student count and coursework weight
        pub rule header() -> (usize, f64)
            = blank()? count:unsigned() blank() weight:number() blank()?
            {? usize::try_from(count).map(|c| (c, weight)).or(Err("student count")) }

        /// parses one student line: registration number, exam mark,
        /// coursework mark
        pub rule record() -> StudentMark
            = blank()? registration_number:unsigned() blank()
              exam_mark:number() blank()
              coursework_mark:number() blank()?
            {
                StudentMark {
                    registration_number,
                    exam_mark,
                    coursework_mark,
                }
            }
    }
}
