/*!
Ленивый построчный поиск совпадений регулярного выражения.

Этот крейт предоставляет поисковый примитив [`search`]: по упорядоченному
списку строк и скомпилированному регулярному выражению он строит ленивый
итератор [`Matches`], выдающий одну запись [`MatchRecord`] на каждую строку,
которая содержит хотя бы одно совпадение. Строки без совпадений пропускаются
молча, и для каждой совпавшей строки сообщается только первое совпадение.

Поисковик никогда не возвращает ошибку. Конец последовательности — это
обычное исчерпание итератора (`None`), а не условие ошибки. Компиляция
регулярного выражения — забота вызывающего.

# Пример

```
use {linegrep_searcher::search, regex::Regex};

let lines = vec!["testline1".to_string(), "testline2".to_string()];
let pattern = Regex::new("ne2").unwrap();
let records: Vec<_> = search(&lines, &pattern).collect();
assert_eq!(1, records.len());
assert_eq!(1, records[0].line_index);
assert_eq!("ne2", records[0].matched_substring);
assert_eq!(6, records[0].start_offset);
```
*/

use regex::Regex;

/// Запись об одном совпадении в одной строке.
///
/// Запись неизменяема после построения. Поле `line_text` содержит полную
/// исходную строку, включая терминатор строки, если он был; никакой
/// нормализации здесь не выполняется.
///
/// Инвариант: `start_offset + matched_substring.len() <= line_text.len()`,
/// и срез `line_text` в этом диапазоне равен `matched_substring`, когда
/// последняя непуста. Пустая `matched_substring` допустима: шаблон нулевой
/// ширины (например, пустой шаблон) совпадает в каждой строке со смещением 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRecord {
    /// Порядковый номер строки в просканированной последовательности,
    /// начиная с нуля.
    pub line_index: usize,
    /// Полное исходное содержимое строки.
    pub line_text: String,
    /// Точная подстрока, удовлетворившая шаблону.
    pub matched_substring: String,
    /// Байтовое смещение начала совпадения внутри `line_text`.
    pub start_offset: usize,
}

/// Ищет совпадения шаблона в списке строк.
///
/// Возвращаемый итератор ленив: каждый вызов `next` выполняет не больше
/// работы, чем нужно для нахождения следующей совпавшей строки. Ничего не
/// материализуется заранее, поэтому потребитель может прервать обход в
/// любой момент.
///
/// Пустой список строк даёт сразу исчерпанный итератор. Каждый вызов
/// `search` возвращает свежий, независимый итератор по тем же строкам.
pub fn search<'r, 's>(lines: &'s [String], pattern: &'r Regex) -> Matches<'r, 's> {
    Matches { pattern, lines: lines.iter().enumerate() }
}

/// Итератор по совпавшим строкам, возвращаемый [`search`].
///
/// Выдаёт записи в строго возрастающем порядке `line_index`, по одной на
/// совпавшую строку. `'r` — время жизни скомпилированного шаблона,
/// `'s` — время жизни просматриваемых строк.
#[derive(Debug)]
pub struct Matches<'r, 's> {
    pattern: &'r Regex,
    lines: std::iter::Enumerate<std::slice::Iter<'s, String>>,
}

impl<'r, 's> Iterator for Matches<'r, 's> {
    type Item = MatchRecord;

    fn next(&mut self) -> Option<MatchRecord> {
        for (line_index, line) in self.lines.by_ref() {
            if let Some(m) = self.pattern.find(line) {
                return Some(MatchRecord {
                    line_index,
                    line_text: line.clone(),
                    matched_substring: m.as_str().to_string(),
                    start_offset: m.start(),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn record(
        line_index: usize,
        line_text: &str,
        matched_substring: &str,
        start_offset: usize,
    ) -> MatchRecord {
        MatchRecord {
            line_index,
            line_text: line_text.to_string(),
            matched_substring: matched_substring.to_string(),
            start_offset,
        }
    }

    #[test]
    fn single_line_match() {
        let lines = lines(&["testline1"]);
        let pattern = Regex::new("tli").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(vec![record(0, "testline1", "tli", 3)], got);
    }

    #[test]
    fn second_line_match() {
        let lines = lines(&["testline1", "testline2"]);
        let pattern = Regex::new("ne2").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(vec![record(1, "testline2", "ne2", 6)], got);
    }

    #[test]
    fn empty_pattern_matches_at_start() {
        let lines = lines(&["testline1"]);
        let pattern = Regex::new("").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(vec![record(0, "testline1", "", 0)], got);
    }

    #[test]
    fn empty_lines_exhausts_immediately() {
        let lines: Vec<String> = vec![];
        let pattern = Regex::new("ne2").unwrap();
        let mut matches = search(&lines, &pattern);
        assert_eq!(None, matches.next());
        // Повторный запрос после исчерпания — тоже просто None.
        assert_eq!(None, matches.next());
    }

    #[test]
    fn non_matching_lines_skipped_in_order() {
        let lines = lines(&["foo", "bar", "foobar", "baz", "barfoo"]);
        let pattern = Regex::new("foo").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(
            vec![
                record(0, "foo", "foo", 0),
                record(2, "foobar", "foo", 0),
                record(4, "barfoo", "foo", 3),
            ],
            got
        );
        let indexes: Vec<usize> = got.iter().map(|r| r.line_index).collect();
        let mut sorted = indexes.clone();
        sorted.sort();
        assert_eq!(sorted, indexes);
    }

    #[test]
    fn first_match_per_line_only() {
        let lines = lines(&["abcabcabc"]);
        let pattern = Regex::new("abc").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(vec![record(0, "abcabcabc", "abc", 0)], got);
    }

    #[test]
    fn line_terminator_preserved_in_record() {
        let lines = lines(&["testline1\n"]);
        let pattern = Regex::new("tli").unwrap();
        let got: Vec<_> = search(&lines, &pattern).collect();
        assert_eq!(vec![record(0, "testline1\n", "tli", 3)], got);
    }

    #[test]
    fn each_call_returns_fresh_iterator() {
        let lines = lines(&["testline1"]);
        let pattern = Regex::new("tli").unwrap();
        let mut first = search(&lines, &pattern);
        assert!(first.next().is_some());
        assert_eq!(None, first.next());
        // Исчерпание одного итератора не влияет на следующий вызов.
        let mut second = search(&lines, &pattern);
        assert!(second.next().is_some());
    }

    #[test]
    fn pull_based_iteration_is_incremental() {
        let lines = lines(&["match1", "nothing", "match2"]);
        let pattern = Regex::new("match").unwrap();
        let mut matches = search(&lines, &pattern);
        assert_eq!(Some(record(0, "match1", "match", 0)), matches.next());
        assert_eq!(Some(record(2, "match2", "match", 0)), matches.next());
        assert_eq!(None, matches.next());
    }

    #[test]
    fn record_slice_invariant_holds() {
        let lines = lines(&["  spaced match here"]);
        let pattern = Regex::new(r"m\w+h").unwrap();
        for r in search(&lines, &pattern) {
            assert!(r.start_offset + r.matched_substring.len() <= r.line_text.len());
            let end = r.start_offset + r.matched_substring.len();
            assert_eq!(&r.line_text[r.start_offset..end], r.matched_substring);
        }
    }
}
