// ============================================================================
// REACTIVITY - Valor observable con notificación a subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Box<dyn Fn()>;

/// Valor compartido que notifica en cada cambio. Los clones comparten
/// tanto el valor como los subscribers (una sola lista por app).
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor actual (copia)
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Reemplazar el valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Reemplazar SIN notificar. Solo para ajustes hechos durante el
    /// propio render (p.ej. la redirección del route guard), donde
    /// notificar encadenaría re-renders.
    pub fn set_silent(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
    }

    /// Mutar el valor in situ y notificar
    pub fn update(&self, updater: impl FnOnce(&mut T)) {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifica_a_los_subscribers() {
        let value = Observable::new(0);
        let notified = Rc::new(Cell::new(0));

        let counter = notified.clone();
        value.subscribe(move || counter.set(counter.get() + 1));

        value.set(1);
        value.update(|v| *v += 1);

        assert_eq!(value.get(), 2);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn los_clones_comparten_valor_y_subscribers() {
        let value = Observable::new(String::new());
        let clone = value.clone();
        let notified = Rc::new(Cell::new(false));

        let flag = notified.clone();
        clone.subscribe(move || flag.set(true));

        value.set("hola".to_string());

        assert_eq!(clone.get(), "hola");
        assert!(notified.get());
    }
}
