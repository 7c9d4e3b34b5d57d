#[derive(Default, Debug)]
pub struct Node {
    children: [Option<Box<Node>>; 26],
    is_end: bool,
}

fn slot(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| c as usize - 'a' as usize)
}

fn slots(word: &str) -> Vec<usize> {
    normalize(word)
        .bytes()
        .map(|b| usize::from(b - b'a'))
        .collect()
}

impl Node {
    pub fn get(&self, c: char) -> Option<&Node> {
        self.children.get(slot(c)?)?.as_deref()
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// A node that spells no word and leads to none.
    #[cfg(test)]
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_end && self.is_leaf()
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &Node)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| Some((char::from(b'a' + i as u8), child.as_deref()?)))
    }

    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    fn child_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }
}

impl Drop for Node {
    // Tear subtrees down with an explicit stack; a single long word is a chain
    // as deep as the word is long.
    fn drop(&mut self) {
        let mut pending = self
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

/// Lowercases ASCII letters and drops everything else.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A set of words stored one letter per edge.
///
/// Every operation normalizes its input first, so `"Hello-World"` and
/// `"helloworld"` name the same word. The empty word is stored on the root.
#[derive(Default, Debug)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the word was not stored before.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for slot in slots(word) {
            node = node.children[slot].get_or_insert_with(|| Box::new(Node::default()));
        }

        let added = !node.is_end;
        node.is_end = true;
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for letter in normalize(word).chars() {
            let Some(child) = node.get(letter) else {
                return false;
            };
            node = child;
        }
        node.is_end
    }

    /// Returns `true` if the word was stored. Nodes left spelling nothing are
    /// released; other words are never touched.
    pub fn remove(&mut self, word: &str) -> bool {
        let slots = slots(word);

        // `keep` ends up as the depth of the deepest node on the path that
        // must outlive the target: the root, a word end, or a fork.
        let mut keep = 0;
        let mut node = &self.root;
        for (depth, &slot) in slots.iter().enumerate() {
            if node.is_end || node.child_count() > 1 {
                keep = depth;
            }
            let Some(child) = node.children[slot].as_deref() else {
                return false;
            };
            node = child;
        }
        if !node.is_end {
            return false;
        }
        let prune = node.is_leaf();

        let removed = match slots.get(keep) {
            Some(&slot) if prune => {
                let branch = self
                    .node_mut(&slots[..keep])
                    .and_then(|ancestor| ancestor.children[slot].take());
                log::trace!(depth = keep, released = slots.len() - keep; "pruned branch");
                branch.is_some()
            }
            _ => self
                .node_mut(&slots)
                .is_some_and(|target| std::mem::replace(&mut target.is_end, false)),
        };

        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = vec![];
        let mut buffer = String::new();
        let mut stack = vec![(&self.root, 0, None)];

        while let Some((node, depth, letter)) = stack.pop() {
            buffer.truncate(depth);
            if let Some(letter) = letter {
                buffer.push(letter);
            }
            if node.is_end {
                words.push(buffer.clone());
            }
            for (letter, child) in node.children().rev() {
                stack.push((child, buffer.len(), Some(letter)));
            }
        }

        words
    }

    fn node_mut(&mut self, slots: &[usize]) -> Option<&mut Node> {
        slots.iter().try_fold(&mut self.root, |node, &slot| {
            node.children[slot].as_deref_mut()
        })
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
