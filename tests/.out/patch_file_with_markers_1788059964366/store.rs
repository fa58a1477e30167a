fn a() {}
fn b2() {}
fn d() {}
