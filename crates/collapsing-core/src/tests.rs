#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_replace_only_notifies_on_change() {
        let sig = signal(1.0f32);
        let calls = Rc::new(RefCell::new(0));

        let calls_clone = calls.clone();
        sig.subscribe(move |_| *calls_clone.borrow_mut() += 1);

        assert!(!sig.replace(1.0));
        assert_eq!(*calls.borrow(), 0);
        assert!(sig.replace(0.5));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));
        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(3);
        let mirror = Rc::new(RefCell::new(0));

        let (sig_clone, mirror_clone) = (sig.clone(), mirror.clone());
        sig.subscribe(move |_| *mirror_clone.borrow_mut() = sig_clone.get());
        sig.set(7);

        assert_eq!(*mirror.borrow(), 7);
    }

    #[test]
    fn test_subscriber_can_write_and_subscribe() {
        let sig = signal(0);
        let late = Rc::new(RefCell::new(Vec::new()));

        let (sig_clone, late_clone) = (sig.clone(), late.clone());
        sig.subscribe(move |v| {
            if *v == 1 {
                let late_inner = late_clone.clone();
                sig_clone.subscribe(move |v| late_inner.borrow_mut().push(*v));
                sig_clone.set(2);
            }
        });
        sig.set(1);
        sig.update(|v| *v += 1);

        assert_eq!(sig.get(), 3);
        assert_eq!(*late.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#123"), Color::BLACK);
        assert_eq!(Color::from_hex("#FF5733AA").to_hex(), "#FF5733AA");
    }

    #[test]
    fn test_color_with_opacity() {
        let c = Color::from_rgb(10, 20, 30);
        assert_eq!(c.with_opacity(0.0).3, 0);
        assert_eq!(c.with_opacity(1.0).3, 255);
        assert_eq!(c.with_opacity(0.5).3, 128);
        assert_eq!(c.with_opacity(7.0).3, 255);
        assert_eq!(c.with_opacity(f32::NAN).3, 0);
        assert_eq!(Color::from_rgba(0, 0, 0, 100).with_opacity(0.5).3, 50);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(5.0, 0.0, 10.0), 0.5);
        assert_eq!(progress(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(progress(50.0, 0.0, 10.0), 1.0);
        // descending range
        assert_eq!(progress(2.5, 10.0, 0.0), 0.75);
        // zero-length range is a step
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
        assert_eq!(progress(0.1, 0.0, 0.0), 1.0);
        assert_eq!(progress(-0.1, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(
            Rect::from_size(Size::new(320.0, 480.0)),
            Rect::new(0.0, 0.0, 320.0, 480.0)
        );
    }

    #[test]
    fn test_sanitize_length() {
        assert_eq!(sanitize_length(12.0, "h"), 12.0);
        assert_eq!(sanitize_length(-3.0, "h"), 0.0);
        assert_eq!(sanitize_length(f32::INFINITY, "h"), 0.0);
        assert_eq!(sanitize_length(f32::NAN, "h"), 0.0);
    }

    #[test]
    fn test_scene_placement() {
        let mut scene = Scene::default();
        scene.push(SceneNode::PushClip {
            rect: Rect::new(0.0, 0.0, 320.0, 480.0),
        });
        scene.push(SceneNode::Place {
            view: 7,
            rect: Rect::new(0.0, 20.0, 320.0, 100.0),
        });
        scene.push(SceneNode::PopClip);

        assert_eq!(scene.placement(7), Some(Rect::new(0.0, 20.0, 320.0, 100.0)));
        assert_eq!(scene.placement(8), None);
    }
}
