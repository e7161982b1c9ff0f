//! 单一状态容器抽象
//!
//! 会话与管理面板的状态在浏览器中各自只有一份 `RwSignal`，通过 Context 共享；
//! 控制器只依赖 `StateCell`，测试中使用 `Rc<RefCell<T>>` 替代。
//!
//! 两个方法在底层值已被释放（组件卸载）时返回 `None`，
//! 迟到的异步结果因此被丢弃而不会写入已卸载的状态。

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    /// 只读访问（不建立响应式追踪）
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    /// 可变访问，修改会通知订阅者
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// 可手动释放的测试容器，模拟组件卸载后的 `RwSignal`
#[cfg(test)]
pub(crate) struct DisposableCell<T>(Rc<RefCell<Option<T>>>);

#[cfg(test)]
impl<T> DisposableCell<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Some(value))))
    }

    /// 释放并取回最后的值
    pub(crate) fn dispose(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }
}

#[cfg(test)]
impl<T> Clone for DisposableCell<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
impl<T> StateCell<T> for DisposableCell<T> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }
}
