use anyhow::Result;
use drills_challenges::min_stack::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let mut stack = LinkedMinStack::default();
    Ok(Some(Solution {
        outputs: run_operations(&mut stack, &challenge.operations),
    }))
}

#[derive(Debug)]
struct Node {
    val: i32,
    min: i32,
    next: Option<Box<Node>>,
}

/// Singly linked list whose head is the top of the stack.
#[derive(Debug, Default)]
pub struct LinkedMinStack {
    head: Option<Box<Node>>,
    len: usize,
}

impl MinStack for LinkedMinStack {
    fn push(&mut self, val: i32) {
        let min = self.get_min().map_or(val, |min| min.min(val));
        let next = self.head.take();
        self.head = Some(Box::new(Node { val, min, next }));
        self.len += 1;
    }

    fn pop(&mut self) -> Option<i32> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.val)
    }

    fn top(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.val)
    }

    fn get_min(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.min)
    }

    fn len(&self) -> usize {
        self.len
    }
}

// Iterative so long stacks don't overflow the call stack when dropped.
impl Drop for LinkedMinStack {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
